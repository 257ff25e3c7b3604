use std::env;
use std::io::{self, BufRead, Write};
use std::process;

use chess_trainer_core::{
    Color, EndpointsDrill, InterceptDrill, MemoryQuestion, MemoryDrill, Notation, Result,
    SquareColorDrill, load_problem_file,
};
use rand::Rng;

fn main() {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let outcome = match args[1].as_str() {
        "bishop" => run_bishop_trainer(),
        "memory" => {
            if args.len() < 4 {
                println!("Error: Please provide a problem file and a problem number");
                println!("Usage: {} memory <problem_file> <n>", args[0]);
                process::exit(1);
            }
            let problem_number: usize = match args[3].parse() {
                Ok(n) => n,
                Err(_) => {
                    println!("Couldn't parse '{}' as a number", args[3]);
                    process::exit(1);
                }
            };
            run_memory_trainer(&args[2], problem_number)
        }
        "blindfold" => {
            if args.len() < 3 {
                println!("Error: Please provide a problem file");
                println!("Usage: {} blindfold <problem_file>", args[0]);
                process::exit(1);
            }
            run_blindfold(&args[2])
        }
        _ => {
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = outcome {
        println!("Error: {}", e);
        process::exit(1);
    }
}

fn print_usage(program: &str) {
    println!("Usage: {} <command> [arguments]", program);
    println!();
    println!("Commands:");
    println!("  bishop                    Bishop geometry drills");
    println!("  memory <file> <n>         Memorize problem n from a problem file");
    println!("  blindfold <file>          Step through a problem file blindfold");
    println!();
    println!("Examples:");
    println!("  {} bishop", program);
    println!("  {} memory problems.json 3", program);
}

fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
    let _ = io::stdout().flush();
}

/// Reads one line from stdin; None on EOF.
fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\n', '\r']).to_string()),
    }
}

fn wait_for_enter() -> bool {
    read_line().is_some()
}

fn run_bishop_trainer() -> Result<()> {
    let mut rng = rand::rng();

    loop {
        clear_screen();

        match rng.random_range(0..3) {
            0 => {
                let drill = InterceptDrill::generate(&mut rng);
                print!("{} ", drill.question());
                let _ = io::stdout().flush();

                let Some(answer) = read_line() else { return Ok(()) };
                match drill.grade(&answer) {
                    Ok(true) => println!("Correct!"),
                    Ok(false) => {
                        println!("Incorrect! The solution is: {}", drill.solution_text())
                    }
                    Err(e) => println!("Invalid positions: '{}'", e),
                }
            }
            1 => {
                let drill = SquareColorDrill::generate(&mut rng);
                print!("{} ", drill.question());
                let _ = io::stdout().flush();

                let Some(answer) = read_line() else { return Ok(()) };
                let guess = if answer.trim().to_ascii_lowercase().starts_with('w') {
                    Color::White
                } else {
                    Color::Black
                };
                if drill.grade(guess) {
                    println!("Correct!");
                } else {
                    println!("Incorrect! It is {}", drill.answer().name());
                }
            }
            _ => {
                let drill = EndpointsDrill::generate(&mut rng);
                println!("{}", drill.question());

                loop {
                    let Some(answer) = read_line() else { return Ok(()) };
                    match drill.grade(&answer) {
                        Ok(true) => {
                            println!("Correct!");
                            break;
                        }
                        Ok(false) => {
                            println!("Incorrect! It's {}", drill.solution_text());
                            break;
                        }
                        Err(e) => {
                            println!("Invalid positions: '{}'. Please try again", e)
                        }
                    }
                }
            }
        }

        if !wait_for_enter() {
            return Ok(());
        }
    }
}

fn run_memory_trainer(path: &str, problem_number: usize) -> Result<()> {
    let problems = load_problem_file(path)?;
    tracing::debug!(count = problems.len(), "loaded problem file");

    let Some(problem) = problem_number
        .checked_sub(1)
        .and_then(|i| problems.get(i))
    else {
        println!(
            "Problem number {} is out of range, the file has {} problems",
            problem_number,
            problems.len()
        );
        process::exit(1);
    };

    clear_screen();
    print!("{}", problem.describe(true, Notation::English));
    println!("-----------------------------------------------------------");
    print!("Press enter when done memorizing...");
    let _ = io::stdout().flush();
    if !wait_for_enter() {
        return Ok(());
    }

    let drill = MemoryDrill::new(problem.clone());
    let mut rng = rand::rng();

    loop {
        clear_screen();

        let question = drill.next_question(&mut rng);
        print!("{} ", question.prompt());
        let _ = io::stdout().flush();

        let Some(answer) = read_line() else { return Ok(()) };
        if answer == "exit" {
            return Ok(());
        }

        let graded = match question {
            MemoryQuestion::SpotCheck(pos) => drill.grade_spot_check(pos, &answer),
            MemoryQuestion::RankContents(rank) => drill.grade_rank_contents(rank, &answer),
        };

        match graded {
            Ok(g) if g.correct => println!("Correct!"),
            Ok(g) => println!("Incorrect! It's {}", g.expected),
            Err(e) => println!("Invalid response: {}", e),
        }

        if !wait_for_enter() {
            return Ok(());
        }
    }
}

fn run_blindfold(path: &str) -> Result<()> {
    let problems = load_problem_file(path)?;
    tracing::debug!(count = problems.len(), "loaded problem file");

    for (i, problem) in problems.iter().enumerate() {
        clear_screen();
        println!("Problem {} of {}", i + 1, problems.len());
        print!("{}", problem.describe(true, Notation::English));
        print!("Press enter for the next position (or 'exit')...");
        let _ = io::stdout().flush();

        match read_line() {
            None => return Ok(()),
            Some(line) if line == "exit" => return Ok(()),
            Some(_) => {}
        }
    }

    Ok(())
}
