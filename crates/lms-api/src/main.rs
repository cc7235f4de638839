#[tokio::main]
async fn main() {
    if let Err(err) = lms_api::run().await {
        tracing::error!(error = %err, "lms-api failed");
        std::process::exit(1);
    }
}
