//! Driver binary walking the tree through its whole surface: build from
//! random data, print, traverse, skew, rebalance.

use balanced_bst::print::render;
use balanced_bst::Tree;
use clap::Parser;
use rand::Rng;

#[derive(Parser)]
#[command(name = "bst-demo")]
#[command(about = "Builds a balanced tree from random values and exercises the full API")]
struct Args {
    /// How many random values to build the tree from.
    #[arg(long, default_value = "15")]
    count: usize,

    /// Exclusive upper bound for the random values.
    #[arg(long, default_value = "100")]
    max: u32,
}

fn main() {
    let args = Args::parse();

    let mut rng = rand::rng();
    let values: Vec<u32> = (0..args.count)
        .map(|_| rng.random_range(0..args.max))
        .collect();
    println!("Initial random array (may contain duplicates): {values:?}");

    let mut tree = Tree::build(values);

    println!("\nBalanced tree built from the sorted unique input:");
    print!("{}", render(tree.root()));
    println!("Is balanced? {}", tree.is_balanced());

    print!("\nLevel order:");
    tree.level_order_for_each(|node| print!(" {}", node.value()));
    print!("\nIn order:   ");
    tree.in_order_for_each(|node| print!(" {}", node.value()));
    print!("\nPre order:  ");
    tree.pre_order_for_each(|node| print!(" {}", node.value()));
    print!("\nPost order: ");
    tree.post_order_for_each(|node| print!(" {}", node.value()));
    println!();

    let samples: Vec<u32> = tree.iter().take(3).copied().collect();
    println!("\nHeight and depth of the first in-order values:");
    for value in samples {
        println!(
            "  {value} -> height: {:?}, depth: {:?}",
            tree.height(&value),
            tree.depth(&value)
        );
    }

    let skew: Vec<u32> = (200..=250).step_by(10).collect();
    println!("\nInserting {skew:?} to skew the tree");
    for value in skew {
        tree.insert(value);
    }
    print!("{}", render(tree.root()));
    println!("Is balanced (should be false)? {}", tree.is_balanced());

    println!("\nRebalancing...");
    tree.rebalance();
    print!("{}", render(tree.root()));
    println!("Is balanced? {}", tree.is_balanced());
}
