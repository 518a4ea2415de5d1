use artistriage::auth::{Authenticator, OAuthConfig};
use artistriage::colors::ColorScheme;
use artistriage::display::display_error;
use artistriage::spotify::SpotifyClient;
use artistriage::*;
use clap::Parser;
use std::{error::Error, io};

fn main() {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(args, &colors) {
        report_failure(error.as_ref(), &colors);
        std::process::exit(1);
    }
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = ArtistriageApp::new(args.data_dir.clone())?;
    app.init_logging()?;
    tracing::info!(data_dir = %app.data_dir.display(), "starting session");

    let http = SpotifyClient::http_client()?;
    let auth = Authenticator::new(
        http.clone(),
        OAuthConfig {
            client_id: args.client_id,
            client_secret: args.client_secret,
            redirect_uri: args.redirect_uri,
        },
        app.token_path.clone(),
    );
    let spotify = SpotifyClient::connect(auth, http)?;

    let mut session = Session::open(app.store.clone(), spotify)?;
    prompt::run(&mut session, io::stdin().lock(), colors)?;

    tracing::info!("session finished");
    Ok(())
}

fn report_failure(error: &(dyn Error + 'static), colors: &ColorScheme) {
    let rate_limit = match error.downcast_ref::<SessionError>() {
        Some(SessionError::Service(ServiceError::RateLimited { retry_after })) => Some(*retry_after),
        _ => match error.downcast_ref::<ServiceError>() {
            Some(ServiceError::RateLimited { retry_after }) => Some(*retry_after),
            _ => None,
        },
    };

    match rate_limit {
        Some(retry_after) => {
            tracing::warn!(retry_after, "rate limit exceeded, stopping");
            println!(
                "{}",
                colors.warning(&format!(
                    "Rate limit exceeded. Wait for {} seconds. Your progress is saved.",
                    retry_after
                ))
            );
        }
        None => {
            tracing::error!(%error, "session aborted");
            display_error(&error.to_string(), colors);
        }
    }
}
