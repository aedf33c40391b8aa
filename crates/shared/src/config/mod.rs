mod myconfig;
mod supabase;

pub use self::myconfig::{Config, MapsConfig};
pub use self::supabase::{SupabaseClient, parse_content_range};
