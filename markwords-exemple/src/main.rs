use markwords_core::model::generation_input::GenerationInput;
use markwords_core::model::generator::Generator;
use markwords_core::model::probability_model::ProbabilityModel;
use markwords_core::model::random::SequenceRandom;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A tiny embedded corpus; real callers load one from disk with
    // io::load_word_list, which also strips comments and junk entries
    let corpus: Vec<String> = ["cat", "car", "can", "cart", "corn", "cone"]
        .iter()
        .map(|word| word.to_string())
        .collect();

    // One transition table per context width in 1..=3
    let model = ProbabilityModel::train(&corpus, 3)?;

    // Width 0 is rejected before any building happens
    match ProbabilityModel::train(&corpus, 0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Width 0 is invalid: {e}"),
    }

    // So is an empty corpus
    match ProbabilityModel::train(&[], 3) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("An empty corpus is invalid: {e}"),
    }

    let mut input = GenerationInput::new(3)?;

    // Number of words to generate per batch
    input.word_count = 5;

    // Force generated words to start with "ca"; the chain fills in the rest
    input.seed_prefix = Some("ca".to_owned());

    // Re-generate words already present in the corpus, up to 10 times each
    input.nb_try = 10;

    let mut generator = Generator::new(model.clone());
    for (i, word) in generator.generate_batch(&input).iter().enumerate() {
        println!("Generated word {}: {}", i + 1, word);
    }

    // An injected random source makes generation reproducible
    input.seed_prefix = None;
    let mut fixed = Generator::with_random_source(
        model,
        SequenceRandom::new(vec![0.2, 0.5, 0.8]),
    );
    println!("Reproducible word: {}", fixed.generate(&input));

    Ok(())
}
