#[tokio::main]
async fn main() {
    pantry_server::run().await;
}
