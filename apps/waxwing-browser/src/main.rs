mod browser;

fn main() -> Result<(), eframe::Error> {
    browser::run()
}
