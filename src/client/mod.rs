//! Display client: polls the price proxy and renders the latest snapshot.
mod dashboard;
mod format;
mod render;
mod source;

pub use dashboard::{Dashboard, Panel, View, REFRESH_INTERVAL};
pub use format::MoneyFormat;
pub use render::Renderer;
pub use source::{ProxyClient, SnapshotSource};
