use actix_web::{get, route, web, HttpResponse, Responder};

use crate::app_state::AppState;
use crate::error::GrandPrizeError;
use crate::fetcher::{MEGA_MILLIONS, POWERBALL};
use crate::model::GrandPrizeSummary;

#[get("/heartbeat")]
pub async fn heartbeat() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

#[route("/api/GetGrandPrize", method = "GET", method = "POST")]
pub async fn get_grand_prize(data: web::Data<AppState>) -> Result<HttpResponse, GrandPrizeError> {
    log::info!("HTTP trigger processed a request.");

    let (powerball, mega_millions) = tokio::try_join!(
        data.fetcher.fetch_grand_prize(POWERBALL),
        data.fetcher.fetch_grand_prize(MEGA_MILLIONS),
    )
    .map_err(|e| {
        log::error!("Failed to fetch grand prizes: {e}");
        e
    })?;

    Ok(HttpResponse::Ok().json(GrandPrizeSummary {
        powerball: powerball.next_prize_text,
        mega_millions: mega_millions.next_prize_text,
    }))
}
