use log::{debug, error};
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};

use recipe_explorer::command::HELP;
use recipe_explorer::view::render_listing;
use recipe_explorer::{
    Command, ExplorerConfig, ExplorerError, HttpRecipeSource, RecipeBrowserState, RecipeSource,
    ViewMode,
};

#[tokio::main]
async fn main() -> Result<(), ExplorerError> {
    env_logger::init();

    let mut config = ExplorerConfig::load()?;
    // An endpoint given on the command line wins over config.toml and the environment
    if let Some(url) = env::args().nth(1) {
        config.source.url = url;
    }
    let source = HttpRecipeSource::from_config(&config.source)?;

    let mut state = RecipeBrowserState::new();
    state.begin_initialize();
    let mut fetch = tokio::spawn(async move { source.fetch_catalog().await });
    let mut fetch_pending = true;

    println!("{}", HELP);
    print!("{}", render_listing(&state));

    let mut stdin = BufReader::new(tokio::io::stdin());
    // Kept across iterations: a read interrupted by the fetch branch resumes into it
    let mut input = Vec::new();
    loop {
        tokio::select! {
            joined = &mut fetch, if fetch_pending => {
                fetch_pending = false;
                match joined {
                    Ok(outcome) => state.complete_initialize(outcome),
                    Err(e) => error!("Catalog fetch task failed: {}", e),
                }
                if state.view() == ViewMode::Explore {
                    print!("{}", render_listing(&state));
                }
            }
            read = stdin.read_until(b'\n', &mut input) => {
                match read {
                    Ok(0) => break,
                    Ok(_) => {}
                    Err(e) => {
                        error!("Failed to read command: {}", e);
                        break;
                    }
                }
                let parsed = Command::from_input(&input);
                input.clear();
                match parsed {
                    None => continue,
                    Some(Ok(Command::Quit)) => break,
                    Some(Ok(command)) => {
                        debug!("Applying {:?}", command);
                        print!("{}", command.apply(&mut state));
                    }
                    Some(Err(e)) => println!("{}", e),
                }
            }
        }
    }

    Ok(())
}
