use cloud_tts_catalog::provider::gcp::GcpVoiceClient;
use cloud_tts_catalog::provider::polly::PollyVoiceClient;
use cloud_tts_catalog::registry::CatalogRegistry;
use std::time::Instant;

fn main() {
    let mut registry = CatalogRegistry::open("All_Lang");

    println!("refreshing Google Cloud TTS voices...");
    let start = Instant::now();
    let mut gcp = GcpVoiceClient::from_env().unwrap();
    let catalog = registry.refresh(&mut gcp).unwrap();
    println!("{} languages in {:?}", catalog.len(), start.elapsed());

    println!("refreshing AWS Polly voices...");
    let start = Instant::now();
    let mut polly = PollyVoiceClient::from_env().unwrap();
    let catalog = registry.refresh(&mut polly).unwrap();
    println!("{} languages in {:?}", catalog.len(), start.elapsed());

    println!("catalogs written under {}", registry.store().base_dir().display());
}
