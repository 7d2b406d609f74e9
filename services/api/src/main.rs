use uchinoko_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("uchinoko: {err}");
        std::process::exit(1);
    }
}
