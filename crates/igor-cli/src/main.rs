//! Entrypoint for the `igor` binary.

#[tokio::main(flavor = "current_thread")]
async fn main() {
    std::process::exit(igor_cli::run().await);
}
