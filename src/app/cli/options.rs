use crate::domain::{ClassLevel, Modality, Purpose};

pub(super) fn run_options() {
    print_group("Class level (--level)", ClassLevel::ALL.iter().map(|o| o.label()));
    print_group("Modality (--modality)", Modality::ALL.iter().map(|o| o.label()));
    print_group("Purpose (--purpose)", Purpose::ALL.iter().map(|o| o.label()));
}

fn print_group<'a>(title: &str, labels: impl Iterator<Item = &'a str>) {
    println!("{}:", title);
    for (index, label) in labels.enumerate() {
        let marker = if index == 0 { " (default)" } else { "" };
        println!("  • {}{}", label, marker);
    }
}
