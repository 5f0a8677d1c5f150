fn main() {
    dcm::app::cli::run();
}
