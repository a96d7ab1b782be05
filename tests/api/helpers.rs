use libpagecheck::{
    checks::{self, Check},
    config::{ExpectationSettings, Settings, TargetSettings},
    probe_client::ProbeClient,
    runner::{self, Report},
    telemetry,
};
use once_cell::sync::Lazy;
use std::net::{SocketAddr, TcpListener};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter = "info".to_string();
    let name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = telemetry::get_subscriber(name, default_filter, std::io::stdout);
        telemetry::init_subscriber(subscriber);
    } else {
        let subscriber = telemetry::get_subscriber(name, default_filter, std::io::sink);
        telemetry::init_subscriber(subscriber);
    }
});

pub(crate) const TIMEOUT_MILLISECONDS: u64 = 500;

pub(crate) struct TestTarget {
    pub(crate) server: Option<MockServer>,
    pub(crate) settings: Settings,
    pub(crate) client: ProbeClient,
}

impl TestTarget {
    pub(crate) fn checks(&self) -> Vec<Check> {
        checks::default_checks(&self.settings.expectations)
    }

    pub(crate) async fn run_checks(&self) -> Report {
        runner::run_checks(&self.client, self.checks())
            .await
            .expect("Failed to join check tasks")
    }

    pub(crate) fn server(&self) -> &MockServer {
        self.server.as_ref().expect("Target has no stub server")
    }

    // Serves `body` with `status` on GET /.
    pub(crate) async fn serve(&self, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(self.server())
            .await;
    }
}

fn settings_for(base_url: String) -> Settings {
    Settings {
        target: TargetSettings {
            base_url,
            timeout_milliseconds: TIMEOUT_MILLISECONDS,
        },
        expectations: ExpectationSettings {
            body: "working fine".into(),
            length: 12,
        },
    }
}

// Starts a stub server standing in for the page under test.
pub(crate) async fn spawn_target() -> TestTarget {
    Lazy::force(&TRACING);

    let server = MockServer::start().await;
    let settings = settings_for(server.uri());
    let client = settings.probe_client().expect("Failed to build probe client");

    TestTarget {
        server: Some(server),
        settings,
        client,
    }
}

// Points the checks at a local port nobody listens on.
pub(crate) fn unreachable_target() -> TestTarget {
    Lazy::force(&TRACING);

    let addr = {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .expect("Failed to bind to random port");
        listener.local_addr().unwrap()
    };
    let settings = settings_for(format!("http://{}", addr));
    let client = settings.probe_client().expect("Failed to build probe client");

    TestTarget {
        server: None,
        settings,
        client,
    }
}
