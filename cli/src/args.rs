use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "artistriage")]
#[command(about = "Classify your followed Spotify artists and surface related artists worth following")]
pub struct Args {
    /// Spotify application client ID
    #[arg(long, env = "SPOTIFY_CLIENT_ID")]
    pub client_id: String,

    /// Spotify application client secret
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    /// Redirect URI registered for the Spotify application
    #[arg(long, env = "SPOTIFY_REDIRECT_URI", default_value = "https://localhost")]
    pub redirect_uri: String,

    /// Directory holding the artist registry, token cache and log (default: ~/.artistriage)
    #[arg(short = 'd', long, value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
