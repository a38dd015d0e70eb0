fn main() {
    classplan::app::cli::run();
}
