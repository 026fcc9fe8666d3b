use cloud_tts_catalog::provider::Provider;
use cloud_tts_catalog::registry::CatalogRegistry;
use cloud_tts_catalog::voice::Gender;

fn main() {
    let mut registry = CatalogRegistry::open("All_Lang");
    let missing = registry.load_existing().unwrap();
    if !missing.is_empty() {
        println!("no catalog for {missing:?} yet, run the refresh_voices demo first");
    }

    for provider in Provider::ALL {
        println!("--- {provider} ---");
        for language in registry.language_codes(provider) {
            println!("{language}");
        }
        for gender in [Gender::Female, Gender::Male] {
            let voices = registry.voices(provider, "en-US", gender);
            if voices.is_empty() {
                println!("no {gender} voices for en-US");
            } else {
                println!("en-US {gender}: {voices:?}");
            }
        }
    }
}
