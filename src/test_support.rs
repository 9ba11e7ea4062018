use axum::Router;
use tokio::net::TcpListener;

/// Serves `router` on an ephemeral local port and returns its base url
pub(crate) async fn serve(router: Router) -> anyhow::Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("test server stopped: {e:?}");
        }
    });
    Ok(format!("http://{addr}"))
}

pub(crate) const FULL_UPSTREAM_BODY: &str = r#"{"bitcoin":{"usd":65000,"eur":60000,"jpy":9800000,"gbp":51000,"aud":97000,"cad":88000,"chf":57000,"cny":470000,"hkd":508000,"idr":1020000000}}"#;
