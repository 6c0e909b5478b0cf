fn main() {
    snapshot_pipeline::cli::run();
}
