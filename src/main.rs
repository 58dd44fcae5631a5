// Entrypoint for the CLI application.
// - Keeps `main` small: load credentials, build the API client and hand
//   control to the UI loop.
// - A missing or incomplete credential file aborts with exit code 1 before
//   the menu ever starts; everything after that is handled in the loop.

use mistclean_cli::api::ApiClient;
use mistclean_cli::credentials::{credentials_path, Credentials};
use mistclean_cli::ui::{main_menu, TerminalPrompt};

fn main() -> anyhow::Result<()> {
    let path = credentials_path();
    let credentials = match Credentials::load(&path) {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("[ERROR] {e}");
            std::process::exit(1);
        }
    };
    println!("[INFO] Token and Org ID loaded successfully.");

    // Base URL comes from `MIST_API_URL` or defaults to the production API.
    let api = ApiClient::from_env(credentials)?;

    // Blocks until the operator chooses Exit.
    main_menu(&api, &mut TerminalPrompt)?;
    Ok(())
}
