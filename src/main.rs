mod beacons;
mod utils;

use std::io::Write;

use argparse::{ArgumentParser, Store, StoreTrue};

use utils::common::{
    print_error, EXIT_CODE_NO_RESULTS, EXIT_CODE_OUTPUT_FAILED, EXIT_CODE_QUERY_FAILED,
    EXIT_CODE_USAGE,
};
use utils::config::{self, ReportConfig};
use utils::output;

#[tokio::main]
async fn main() {
    // Parse command-line arguments
    let mut database = String::new();
    let mut config_path = String::new();
    let mut mongo_uri = String::new();
    let mut delimiter = String::new();
    let mut min_score = 0.0_f64;
    let mut show_net_names = false;
    let mut json_output = false;
    let mut human_readable = false;
    let mut verbose = false;

    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Print hosts which show signs of C2 software");
        ap.refer(&mut database).add_argument(
            "database",
            Store,
            "Name of the analysis database to report on",
        );
        ap.refer(&mut config_path).add_option(
            &["-c", "--config"],
            Store,
            "Path of a YAML config file with connection and output defaults",
        );
        ap.refer(&mut mongo_uri).add_option(
            &["-o", "--mongo-uri"],
            Store,
            "Pass the mongo uri holding the analysis results",
        );
        ap.refer(&mut delimiter).add_option(
            &["-d", "--delimiter"],
            Store,
            "Delimiter between fields in the default delimited output",
        );
        ap.refer(&mut min_score).add_option(
            &["-m", "--min-score"],
            Store,
            "Only report findings scoring at least this value",
        );
        ap.refer(&mut show_net_names).add_option(
            &["-n", "--network-names"],
            StoreTrue,
            "Show network names of the source and destination hosts",
        );
        ap.refer(&mut json_output).add_option(
            &["-j", "--json"],
            StoreTrue,
            "Print results as a JSON array",
        );
        ap.refer(&mut human_readable).add_option(
            &["-H", "--human-readable"],
            StoreTrue,
            "Print results in a human-readable table",
        );
        ap.refer(&mut verbose)
            .add_option(&["-v", "--verbose"], StoreTrue, "Enable verbose mode!");
        ap.parse_args_or_exit();
    }

    if database.is_empty() {
        print_error("Specify a database", EXIT_CODE_USAGE);
    }

    let file_config = if config_path.is_empty() {
        ReportConfig::default()
    } else {
        match ReportConfig::load(&config_path) {
            Ok(file_config) => file_config,
            Err(e) => print_error(
                &format!("Error reading config {}: {}", config_path, e),
                EXIT_CODE_USAGE,
            ),
        }
    };

    let mongo_uri = config::resolve(
        &mongo_uri,
        file_config.mongo_uri.as_ref(),
        config::DEFAULT_MONGO_URI,
    );
    let delimiter = config::resolve(
        &delimiter,
        file_config.delimiter.as_ref(),
        config::DEFAULT_DELIMITER,
    );

    if verbose {
        println!("[+] Verbose mode enabled!");
        println!("[+] Reporting beacons from {}", database);
    }

    let data = match beacons::source::results(&mongo_uri, &database, min_score).await {
        Ok(data) => data,
        Err(e) => print_error(&format!("Error: {}", e), EXIT_CODE_QUERY_FAILED),
    };

    if data.is_empty() {
        print_error(
            &format!("No results were found for {}", database),
            EXIT_CODE_NO_RESULTS,
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let rendered = if json_output {
        output::render_json(&mut out, &data, show_net_names)
    } else if human_readable {
        output::render_table(&mut out, &data, show_net_names)
    } else {
        output::render_delimited(&mut out, &data, &delimiter, show_net_names)
    };

    if let Err(e) = rendered.and_then(|_| out.flush()) {
        print_error(&format!("Error writing output: {}", e), EXIT_CODE_OUTPUT_FAILED);
    }
}
