use service::CompileService;
use tokio::io::AsyncReadExt;

#[macro_use]
extern crate log;

mod service;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    std::env::set_var("RUST_LOG", "closurec");
    env_logger::init();

    // Read the whole source text before opening any connection
    let mut js_code = String::new();
    tokio::io::stdin().read_to_string(&mut js_code).await?;
    trace!("Read {} bytes of source text from stdin", js_code.len());

    // Initialize service
    let service = CompileService::new();

    // Run the single compile exchange and print whatever the service
    // answered, compiled code and error listings alike
    let body = service.compile(js_code).await?;
    println!("{}", body);

    Ok(())
}
