use plt_reader::{read_dataset, ZoneExtent};
use std::{env, fs, process};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <path-to-plt-file>", args[0]);
        process::exit(1);
    }

    let path = &args[1];
    println!("Reading PLT file: {}", path);
    println!("{}", "=".repeat(60));

    let buffer = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("ERROR: Failed to read {}: {}", path, e);
            process::exit(1);
        }
    };

    match read_dataset(&buffer) {
        Ok(dataset) => {
            let header = &dataset.header;
            println!("\nDataset Information:");
            println!("  Magic: {}", header.magic_str());
            println!("  Title: {}", header.title);
            println!("  File type: {}", header.file_type);
            println!("  Byte order: {}", header.byte_order);

            println!("\nVariables ({}):", header.num_vars());
            for name in &header.var_names {
                println!("  {}", name);
            }

            println!("\nZones ({}):", header.num_zones());
            for (meta, zone) in header.zones.iter().zip(&dataset.zones) {
                match meta.extent {
                    ZoneExtent::Ordered { imax, jmax, kmax } => {
                        println!(
                            "  '{}': {}x{}x{} grid, t={}",
                            meta.name, imax, jmax, kmax, meta.solution_time
                        );
                    }
                    ZoneExtent::FiniteElement { connectivity_count } => {
                        println!(
                            "  '{}': finite element, {} connectivity entries, t={}",
                            meta.name, connectivity_count, meta.solution_time
                        );
                    }
                }
                let total: usize = zone.values.iter().map(Vec::len).sum();
                println!("    {} value(s) decoded", total);
            }
        }
        Err(e) => {
            eprintln!("\nERROR: Failed to read PLT file");
            eprintln!("  {}", e);
            process::exit(1);
        }
    }
}
