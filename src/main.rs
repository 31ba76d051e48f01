use clap::{Parser, Subcommand};
use maxheap::{
    driver::{build_heap, read_items, write_deleted, write_drained, write_sorted, write_tree},
    options::HeapOptions,
};

/// Fixed-capacity max-heap driver
#[derive(Debug, Parser)]
#[command(name = "maxheap")]
#[command(about = "Build a fixed-capacity max-heap from integers and inspect it.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the items in ascending order using heap sort
    Sort {
        /// Integers to insert (read from stdin if none are given)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        #[command(flatten)]
        options: HeapOptions,
    },

    /// Print the heap as a sideways tree
    Tree {
        /// Integers to insert (read from stdin if none are given)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        #[command(flatten)]
        options: HeapOptions,
    },

    /// Repeatedly print and remove the maximum
    Drain {
        /// Integers to insert (read from stdin if none are given)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        #[command(flatten)]
        options: HeapOptions,
    },

    /// Delete one occurrence of a value and print the resulting heap array
    Delete {
        /// The value to delete
        #[arg(long, allow_negative_numbers = true)]
        value: i64,

        /// Integers to insert (read from stdin if none are given)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        #[command(flatten)]
        options: HeapOptions,
    },
}

fn main() -> std::io::Result<()> {
    env_logger::builder().filter_level(log::LevelFilter::Info).init();

    let cli = Cli::parse();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Sort { values, options } => {
            let heap = build_heap(read_items(&values, std::io::stdin())?, &options)?;
            write_sorted(&heap, &mut out)?;
        }
        Commands::Tree { values, options } => {
            let heap = build_heap(read_items(&values, std::io::stdin())?, &options)?;
            write_tree(&heap, &mut out)?;
        }
        Commands::Drain { values, options } => {
            let mut heap = build_heap(read_items(&values, std::io::stdin())?, &options)?;
            write_drained(&mut heap, &mut out)?;
        }
        Commands::Delete {
            value,
            values,
            options,
        } => {
            let mut heap = build_heap(read_items(&values, std::io::stdin())?, &options)?;
            write_deleted(&mut heap, value, &mut out)?;
        }
    }
    Ok(())
}
