use actix_web::{web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

use grand_prize_api::app_state::AppState;
use grand_prize_api::cache::TtlCache;
use grand_prize_api::config::Config;
use grand_prize_api::fetcher::GrandPrizeFetcher;
use grand_prize_api::handlers::{get_grand_prize, heartbeat};
use grand_prize_api::logging::{self, setup_logger};
use grand_prize_api::upstream::MuslClient;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    setup_logger();

    let config = Config::from_env();
    let bind_address = config.bind_address();

    if !config.has_upstream_credentials() {
        log::warn!("Upstream endpoint or API key not set; grand prize requests will fail");
    }

    // Lives for the whole process and is shared by every worker
    let cache = Arc::new(TtlCache::new());
    let upstream = Arc::new(MuslClient::from_config(&config));
    let fetcher = Arc::new(GrandPrizeFetcher::new(cache, upstream));

    log::info!("Starting server at http://{bind_address}");

    HttpServer::new(move || {
        App::new()
            .wrap(logging::Logger::default())
            .app_data(web::Data::new(AppState {
                fetcher: Arc::clone(&fetcher),
            }))
            // HEALTH
            .service(heartbeat)
            // GRAND PRIZES
            .service(get_grand_prize)
    })
    .bind(&bind_address)?
    .run()
    .await
}
