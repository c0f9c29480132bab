use urlparamfilter::{cli, logging};

fn main() {
    if let Err(err) = logging::init_logging() {
        eprintln!("urlparamfilter: {:#}", err);
    }

    match cli::run_from_args() {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(err) => {
            eprintln!("urlparamfilter error: {:#}", err);
            std::process::exit(1);
        }
    }
}
