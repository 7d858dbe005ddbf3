use actix_web::{
    body::BoxBody,
    error, get,
    http::{header::ContentType, StatusCode},
    post, web, App, HttpResponse, HttpServer,
};
use serde::Deserialize;
use shoe_sim::prelude::*;
use std::sync::{Mutex, MutexGuard};

type AppEngine = web::Data<Mutex<Option<SimulationEngine>>>;

/// Request body for running a simulation. Meant to be deserialized from JSON.
#[derive(Debug, Deserialize)]
struct RunConfig {
    num_hands: u64,
}

/// An enum that will handle user facing errors
#[derive(Debug)]
enum UserError {
    InternalError,
    SimulatorNotCreated,
    BadInput(String),
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserError::InternalError => write!(f, "an internal error occured"),
            UserError::SimulatorNotCreated => write!(
                f,
                "unable to run, a simulator has not been configured"
            ),
            UserError::BadInput(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for UserError {}

impl error::ResponseError for UserError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            UserError::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            UserError::SimulatorNotCreated => StatusCode::BAD_REQUEST,
            UserError::BadInput(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<SimulationError> for UserError {
    fn from(e: SimulationError) -> Self {
        match e {
            SimulationError::Config(_) | SimulationError::NoHands => {
                UserError::BadInput(e.to_string())
            }
            _ => {
                log::error!("simulation failed: {e}");
                UserError::InternalError
            }
        }
    }
}

fn lock(app_engine: &AppEngine) -> Result<MutexGuard<'_, Option<SimulationEngine>>, UserError> {
    app_engine.lock().map_err(|_| UserError::InternalError)
}

/// A handler that will configure, and build a new `SimulationEngine` using the parameters in the body of the request
#[post("/config-game-params")]
async fn configure_simulation_parameters(
    params: web::Json<SimulationConfig>,
    app_engine: AppEngine,
) -> Result<HttpResponse, UserError> {
    let engine = SimulationEngine::new(params.into_inner())
        .map_err(|e| UserError::BadInput(e.to_string()))?;
    *lock(&app_engine)? = Some(engine);
    log::info!("simulator created");
    Ok(HttpResponse::Ok().body("simulator created successfully"))
}

/// A handler that plays a single round and returns every seat's hand and result.
#[get("/play-round")]
async fn play_round(app_engine: AppEngine) -> Result<HttpResponse, UserError> {
    let mut guard = lock(&app_engine)?;
    let engine = guard.as_mut().ok_or(UserError::SimulatorNotCreated)?;
    let round = engine.play_one_round()?;
    Ok(HttpResponse::Ok().json(round))
}

/// A handler that will run the simulation given the configurations, returning the statistics.
/// Will return an error response if the game has not been configured.
#[post("/run-sim")]
async fn run_simulation(
    params: web::Json<RunConfig>,
    app_engine: AppEngine,
) -> Result<HttpResponse, UserError> {
    let mut guard = lock(&app_engine)?;
    let engine = guard.as_mut().ok_or(UserError::SimulatorNotCreated)?;
    engine.run_many(params.num_hands)?;
    Ok(HttpResponse::Ok().json(engine.statistics()))
}

/// A handler returning the statistics recorded so far.
#[get("/stats")]
async fn statistics(app_engine: AppEngine) -> Result<HttpResponse, UserError> {
    let guard = lock(&app_engine)?;
    let engine = guard.as_ref().ok_or(UserError::SimulatorNotCreated)?;
    Ok(HttpResponse::Ok().json(engine.statistics()))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let address = "127.0.0.1";
    let port = 8080;
    log::info!("Listening at {}:{}...", address, port);

    let app_engine: AppEngine = web::Data::new(Mutex::new(None));

    HttpServer::new(move || {
        App::new()
            .app_data(app_engine.clone())
            .service(configure_simulation_parameters)
            .service(play_round)
            .service(run_simulation)
            .service(statistics)
    })
    .bind((address, port))?
    .run()
    .await
}
