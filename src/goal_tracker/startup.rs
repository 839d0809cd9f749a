use actix_web::{dev::Server, middleware::Compress, web::Data, App, HttpServer};
use common::{db::init_db, settings::types::Settings};
use sea_orm::DatabaseConnection;
use server::{get_routes, setup_cors};

pub struct Application {
    host: String,
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(settings: Settings) -> Result<Self, std::io::Error> {
        let db = init_db(&settings).await.map_err(std::io::Error::other)?;
        let address = format!(
            "{}:{}",
            settings.application.host, settings.application.port
        );

        let listener = std::net::TcpListener::bind(&address)?;
        let port = listener.local_addr()?.port();
        let host = settings.application.host.clone();
        let server = run(listener, db, settings)?;

        Ok(Self { host, port, server })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

fn run(
    listener: std::net::TcpListener,
    db: DatabaseConnection,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let http_client = reqwest::Client::new();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .wrap(setup_cors(&settings))
            .service(get_routes())
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(http_client.clone()))
            .app_data(Data::new(settings.clone()))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
