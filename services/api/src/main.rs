use pulsecheck_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("pulsecheck error: {err}");
        std::process::exit(1);
    }
}
