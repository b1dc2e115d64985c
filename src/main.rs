#[tokio::main(flavor = "current_thread")]
async fn main() {
    let code = redeployer::run().await;
    std::process::exit(code);
}
