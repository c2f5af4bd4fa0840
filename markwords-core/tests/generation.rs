use std::env;
use std::fs;

use markwords_core::model::generation_input::GenerationInput;
use markwords_core::model::generator::Generator;
use markwords_core::model::probability_model::ProbabilityModel;
use markwords_core::model::random::SequenceRandom;

fn corpus(words: &[&str]) -> Vec<String> {
	words.iter().map(|word| (*word).to_owned()).collect()
}

#[test]
fn corpus_to_words_end_to_end() {
	let model = ProbabilityModel::train(&corpus(&["cat", "car", "can"]), 2).unwrap();

	// The width-2 table splits "ca" three ways, lexicographically.
	let entries = model.table(2).unwrap().distribution("ca").unwrap().entries();
	assert_eq!(entries[0].0, 'n');
	assert!((entries[0].1 - 1.0 / 3.0).abs() < 1e-9);
	assert_eq!(entries[1].0, 'r');
	assert!((entries[1].1 - 2.0 / 3.0).abs() < 1e-9);
	assert_eq!(entries[2].0, 't');
	assert!((entries[2].1 - 1.0).abs() < 1e-9);

	// Every generated word reaches the terminal through one of the
	// observed branches.
	let mut input = GenerationInput::new(2).unwrap();
	input.word_count = 50;

	let mut generator = Generator::new(model);
	for word in generator.generate_batch(&input) {
		assert!(["cat", "car", "can"].contains(&word.as_str()));
	}
}

#[test]
fn wordlist_cache_round_trips() {
	let wordlist = env::temp_dir().join("markwords_cache_test.txt");
	let cache = env::temp_dir().join("markwords_cache_test.bin");
	fs::write(&wordlist, "cat\ncar\ncan # comment\nnot a word 42\n").unwrap();

	let trained = ProbabilityModel::train_from_wordlist(&wordlist, 2).unwrap();
	assert!(cache.exists());
	assert_eq!(trained.word_count(), 3);

	// The second call must hit the cache and reproduce the exact model.
	let cached = ProbabilityModel::load_or_train(&wordlist, 2).unwrap();
	assert_eq!(trained, cached);

	// A wider request invalidates the cache and retrains.
	let wider = ProbabilityModel::load_or_train(&wordlist, 3).unwrap();
	assert_eq!(wider.width(), 3);

	fs::remove_file(&wordlist).unwrap();
	fs::remove_file(&cache).unwrap();
}

#[test]
fn generation_is_reproducible_across_generators() {
	let model = ProbabilityModel::train(&corpus(&["cat", "car", "can", "cart"]), 2).unwrap();
	let draws = vec![0.2, 0.7, 0.4, 0.1, 0.8, 0.3];

	let input = GenerationInput::new(2).unwrap();

	let mut first = Generator::with_random_source(model.clone(), SequenceRandom::new(draws.clone()));
	let mut second = Generator::with_random_source(model, SequenceRandom::new(draws));

	assert_eq!(first.generate(&input), second.generate(&input));
}
