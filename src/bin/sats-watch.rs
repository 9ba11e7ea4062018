use sats_api::client::{Dashboard, ProxyClient, Renderer, REFRESH_INTERVAL};
use sats_api::{config::Config, logging::init_logging, shutdown_signal};

// clear screen, cursor home
const CLEAR: &str = "\x1b[2J\x1b[H";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging("warn");
    let config = Config::from_env()?;
    let renderer = Renderer::new();
    let dashboard = Dashboard::mount(ProxyClient::new(&config.proxy_url)?, REFRESH_INTERVAL);
    let mut panel = dashboard.subscribe();
    println!("{CLEAR}{}", renderer.render(&dashboard.view()));
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            changed = panel.changed() => {
                if changed.is_err() {
                    break;
                }
                let view = panel.borrow_and_update().view.clone();
                println!("{CLEAR}{}", renderer.render(&view));
            }
        }
    }
    dashboard.teardown();
    Ok(())
}
