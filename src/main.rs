#[tokio::main]
async fn main() {
    if let Err(e) = invitation_backend::run().await {
        eprintln!("invitation-backend failed: {}", e);
        std::process::exit(1);
    }
}
