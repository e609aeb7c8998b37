//! The `gradebook people` command.

use anyhow::Result;

pub fn execute(count: usize, seed: Option<u64>) -> Result<()> {
    let mut generator = super::generator_for(seed);

    for _ in 0..count {
        let person = generator.next_person();
        let gender = person
            .gender
            .map(|g| g.to_string())
            .unwrap_or_default();
        println!("{} {} ({gender})", person.name, person.surname);
    }

    Ok(())
}
