//! Runs every strategy against the same ground truth and prints the final
//! pull counts, estimates, and regret.
//!
//! ```sh
//! cargo run --example strategy_comparison
//! ```

use banditsim::prelude::*;

fn main() -> Result<()> {
    println!("banditsim: strategy comparison\n");
    println!("{}", "=".repeat(60));

    let true_means = vec![0.3, 0.5, 0.8, 0.4];
    let arms = ArmSet::from_means(true_means.clone())?;

    println!("True arm means:");
    for (i, mean) in true_means.iter().enumerate() {
        println!("  arm {}: {:.2}", i, mean);
    }
    println!("\nBest arm: {} ({:.2})\n", arms.best_arm(), arms.best_mean());
    println!("{}", "=".repeat(60));

    let strategies = [
        ("UCB", StrategyKind::Ucb),
        ("Gradient Bandit", StrategyKind::GradientBandit),
        (
            "Epsilon-Greedy (eps=0.1)",
            StrategyKind::EpsilonGreedy { epsilon: 0.1 },
        ),
        ("Thompson Sampling", StrategyKind::ThompsonSampling),
    ];

    for (name, strategy) in strategies {
        println!("\n{}", name);
        println!("{}", "-".repeat(name.len()));

        let config = SimulationConfig::new(strategy, arms.len(), 500).with_seed(42);
        let report = run_with_arms(&config, &arms)?;

        println!("  Total reward: {:.1}", report.total_reward);
        println!("  Final regret: {:.1}", report.final_regret());
        println!("  Pull counts:");
        for (i, count) in report.pull_counts.iter().enumerate() {
            println!(
                "    arm {}: {:4} ({:.1}%)",
                i,
                count,
                *count as f64 / 5.0
            );
        }
        println!("  Estimated means:");
        for (i, estimate) in report.estimated_rewards.iter().enumerate() {
            println!("    arm {}: {:.3}", i, estimate);
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("\nAll strategies except forced exploration converge toward arm 2.");
    Ok(())
}
