mod provider;
mod script;

pub use self::provider::{DynMapsProvider, MapsProviderTrait};
pub use self::script::{DynScriptFetcher, ScriptFetcherTrait};
