use crate::{
    config::Command,
    maths::{
        armstrong::is_armstrong,
        divisors::{count_divisors, is_prime, list_divisors},
        reverse::reverse,
    },
    output::report::{format_list, Row},
    scan::scan_range,
};

pub const DEMO_COMMANDS: [Command; 14] = [
    Command::Armstrong(153),
    Command::Armstrong(123),
    Command::Armstrong(9474),
    Command::Armstrong(1),
    Command::Divisors(12),
    Command::Divisors(1),
    Command::Divisors(9474),
    Command::CountDivisors(12),
    Command::Prime(2),
    Command::Prime(17),
    Command::Reverse(123),
    Command::Reverse(-123),
    Command::Reverse(120),
    Command::Reverse(1_534_236_469),
];

pub fn execute(command: &Command) -> Vec<Row> {
    log::debug!("executing '{command}'");
    let value = match *command {
        Command::Demo => return DEMO_COMMANDS.iter().flat_map(execute).collect(),
        Command::Armstrong(n) => is_armstrong(n).to_string(),
        Command::Divisors(n) => format_list(&list_divisors(n)),
        Command::CountDivisors(n) => count_divisors(n).to_string(),
        Command::Prime(n) => is_prime(n).to_string(),
        Command::Reverse(x) => {
            let reversed = reverse(x);
            if reversed == 0 && x != 0 {
                log::info!("reversing {x} overflows i32");
            }
            reversed.to_string()
        }
        Command::Scan {
            predicate,
            start,
            end,
            progress,
        } => format_list(&scan_range(predicate, start, end, progress)),
    };
    vec![Row::new(command.to_string(), value)]
}
