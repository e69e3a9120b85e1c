use std::{env, error::Error, fs::File, io::BufReader, process::ExitCode};

use dietplan_client::{submit, Outcome};
use dietplan_model::form::PlanForm;
use log::info;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let mut args = env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "form.json".to_owned());
    let url = args
        .next()
        .unwrap_or_else(|| "http://localhost:8080/".to_owned());

    info!("Reading form from {}", path);
    let file = File::open(&path)?;
    let form: PlanForm = serde_json::from_reader(BufReader::new(file))?;

    let client = dietplan_client::create(url);
    match submit(&client, &form).await? {
        Outcome::Plan(plan) => {
            println!("{}", plan);
            Ok(ExitCode::SUCCESS)
        }
        Outcome::Rejected(message) => {
            eprintln!("{}", message);
            Ok(ExitCode::FAILURE)
        }
    }
}
