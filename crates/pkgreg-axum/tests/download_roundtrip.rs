//! The download action resolving against a live registry server.

use std::sync::Arc;

use pkgreg_axum::bootstrap::{AxumContext, CorsConfig};
use pkgreg_axum::routes::create_router;
use pkgreg_client::{DefaultRegistryClient, RegistryClientConfig};
use pkgreg_core::{DownloadAction, RecordingFrame, views_from_detail};
use pkgreg_db::TestDb;
use tokio::net::TcpListener;

#[tokio::test]
async fn download_action_against_live_server() {
    let db = TestDb::new().await.unwrap();
    let ctx = AxumContext::from_repos(db.repos(), "static.test");
    ctx.core.registry().publish("foo", "1.0.0", 1).await.unwrap();
    let app = create_router(ctx, &CorsConfig::AllowAll);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await });

    let client = Arc::new(
        DefaultRegistryClient::new(
            &RegistryClientConfig::new().with_base_url(format!("http://{addr}")),
        )
        .unwrap(),
    );
    let detail = client.package("foo").await.unwrap();
    let (package, versions) = views_from_detail(&detail);

    let frame = Arc::new(RecordingFrame::new());
    let action = DownloadAction::new(client.clone(), frame.clone());
    let url = action.download(&versions[0]).await.unwrap();

    assert_eq!(url, "https://static.test/pkg/foo/foo-1.0.0.tar.gz");
    assert_eq!(frame.src().as_deref(), Some(url.as_str()));
    assert_eq!(package.downloads(), 1);
    assert_eq!(versions[0].downloads(), 1);

    // The server counted the same download
    let detail = client.package("foo").await.unwrap();
    assert_eq!(detail.package.downloads, 1);
    assert_eq!(detail.versions[0].downloads, 1);
}
