use gplace_resolver::PlaceIdResolver;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = gplace_core::load_resolver_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        anyhow::bail!("usage: gplace-demo <maps-url>...");
    }

    let resolver = PlaceIdResolver::from_config(&config)?;
    for url in &urls {
        match resolver.resolve(url).await {
            Some(id) => println!("{url} -> {id}"),
            None => println!("{url} -> <none>"),
        }
    }

    tracing::debug!(count = urls.len(), "resolution run complete");
    Ok(())
}
