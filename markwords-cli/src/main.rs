use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use markwords_core::io::resolve_path;
use markwords_core::model::generation_input::GenerationInput;
use markwords_core::model::generator::Generator;
use markwords_core::model::probability_model::ProbabilityModel;

/// Generate random pronounceable words using Markov chains.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
	/// The word list to train on.
	#[arg(short, long, default_value = "/usr/share/dict/words")]
	dictionary: PathBuf,

	/// The number of words to generate.
	#[arg(short = 'c', long, default_value_t = 1)]
	word_count: usize,

	/// The number of letters of context for the Markov chain.
	#[arg(short, long, default_value_t = 3)]
	width: usize,

	/// Force generated words to begin with this prefix.
	#[arg(short, long)]
	prefix: Option<String>,

	/// Re-generate words already present in the word list, up to this
	/// many attempts each.
	#[arg(long, default_value_t = 0)]
	nb_try: usize,

	/// Ignore any cached binary model and retrain from the word list.
	#[arg(long)]
	rebuild: bool,
}

/// Main entry point for the command-line tool.
///
/// Loads (or cache-loads) the model for the requested word list and
/// width, then prints the generated words one per line, in generation
/// order. Fatal conditions (unreadable word list, empty corpus,
/// invalid width) surface as the process error message.
fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let args = Args::parse();

	let dictionary = resolve_path(&args.dictionary);
	debug!("using word list {}", dictionary.display());

	let model = if args.rebuild {
		// Retraining still refreshes the cache for the next run.
		ProbabilityModel::train_from_wordlist(&dictionary, args.width)?
	} else {
		ProbabilityModel::load_or_train(&dictionary, args.width)?
	};
	info!(
		"model ready: {} words, context width {}",
		model.word_count(),
		model.width()
	);

	let mut input = GenerationInput::new(args.width)?;
	input.word_count = args.word_count;
	input.seed_prefix = args.prefix;
	input.nb_try = args.nb_try;

	let mut generator = Generator::new(model);
	for word in generator.generate_batch(&input) {
		println!("{word}");
	}

	Ok(())
}
