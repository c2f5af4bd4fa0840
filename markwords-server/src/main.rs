use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{get, middleware, put, web, App, HttpResponse, HttpServer, Responder};

use serde::Deserialize;
use markwords_core::io::{get_filename, list_files};
use markwords_core::model::generation_input::GenerationInput;
use markwords_core::model::generator::Generator;
use markwords_core::model::probability_model::ProbabilityModel;

/// Directory holding the word lists the server can train on.
const DATA_DIR: &str = "./data";

/// Context width used when a load request does not specify one.
const DEFAULT_WIDTH: usize = 3;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	count: Option<usize>,
	width: Option<usize>,
	prefix: Option<String>,
	nb_try: Option<usize>,
}

#[derive(Deserialize)]
struct LoadParams {
	name: String,
	width: Option<usize>,
}

struct SharedData {
	wordlist: Option<String>,
	generator: Option<Generator>,
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates words from the currently loaded model based on query
/// parameters. Returns the words newline-joined as the response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let generator = match shared_data.generator.as_mut() {
		Some(g) => g,
		None => return HttpResponse::Conflict().body("No word list loaded, PUT /v1/load first"),
	};

	let width = query.width.unwrap_or_else(|| generator.model().width());
	let mut input = match GenerationInput::new(width) {
		Ok(input) => input,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};
	input.word_count = query.count.unwrap_or(1);
	input.seed_prefix = query.prefix.clone();
	input.nb_try = query.nb_try.unwrap_or(0);

	HttpResponse::Ok().body(generator.generate_batch(&input).join("\n"))
}

#[get("/v1/wordlists")]
async fn get_wordlists() -> impl Responder {
	match list_files(DATA_DIR, "txt") {
		Ok(files) => HttpResponse::Ok().body(files.join("\n").replace(".txt", "")),
		Err(_) => HttpResponse::InternalServerError().body("Failed to list word lists")
	}
}

#[get("/v1/loaded")]
async fn get_loaded(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	match (&shared_data.wordlist, &shared_data.generator) {
		(Some(name), Some(generator)) => {
			HttpResponse::Ok().body(format!("{} (width {})", name, generator.model().width()))
		}
		_ => HttpResponse::Ok().body("none"),
	}
}

#[put("/v1/load")]
async fn put_wordlist(data: web::Data<Mutex<SharedData>>, query: web::Query<LoadParams>) -> impl Responder {
	let name = query.name.trim();
	if name.is_empty() {
		return HttpResponse::BadRequest().body("Missing or empty word list name");
	}
	let width = query.width.unwrap_or(DEFAULT_WIDTH);

	// Accept "english" as well as "english.txt".
	let stem = match get_filename(name) {
		Ok(s) => s,
		Err(_) => return HttpResponse::BadRequest().body("Invalid word list name"),
	};

	let wordlist_path = format!("{}/{}.txt", DATA_DIR, stem);
	let model = match ProbabilityModel::load_or_train(&wordlist_path, width) {
		Ok(m) => m,
		Err(e) => return HttpResponse::InternalServerError().body(format!("Failed to load word list: {e}"))
	};

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	shared_data.wordlist = Some(stem);
	shared_data.generator = Some(Generator::new(model));

	HttpResponse::Ok().body("Word list loaded successfully")
}

/// Main entry point for the server.
///
/// Starts an Actix-web HTTP server with the generation endpoints; the
/// model starts unloaded and is installed through `/v1/load`.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - CORS is permissive so a browser front end can call the API.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let shared_data = SharedData {
		wordlist: None,
		generator: None,
	};
	let shared_model = web::Data::new(Mutex::new(shared_data));

	HttpServer::new(move || {
		App::new()
			.app_data(shared_model.clone())
			.wrap(Cors::permissive())
			.wrap(middleware::Logger::default())
			.service(get_generated)
			.service(get_wordlists)
			.service(get_loaded)
			.service(put_wordlist)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
