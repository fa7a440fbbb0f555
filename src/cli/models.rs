use crate::cli::commands::ModelsArgs;
use crate::cli::render::render_models;
use crate::errors::ComparatorError;
use crate::llm::MODELS;

pub fn handle_models(args: ModelsArgs) -> Result<(), ComparatorError> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(MODELS)?);
    } else {
        print!("{}", render_models(MODELS));
    }
    Ok(())
}
