pub const GCP_VOICES_URL: &str = "https://texttospeech.googleapis.com/v1/voices";
pub const GCP_API_KEY_ENV: &str = "GOOGLE_API_KEY";

pub const POLLY_SERVICE: &str = "polly";
pub const POLLY_VOICES_PATH: &str = "/v1/voices";
pub const AWS_ACCESS_KEY_ENV: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_KEY_ENV: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_REGION_ENV: &str = "AWS_REGION";
pub const AWS_DEFAULT_REGION: &str = "us-east-1";

pub const GCP_CATALOG_FILE: &str = "GCP_VOICES_ALL.json";
pub const POLLY_CATALOG_FILE: &str = "POLLY_VOICES_ALL.json";
