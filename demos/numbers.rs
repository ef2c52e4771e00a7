use sovran_any::{AnyError, AnyValue};

// Example trait: Number
trait Number {
    fn get_value(&self) -> i64;
    fn set_value(&mut self, value: i64);
}

#[derive(Clone)]
struct IntegerValue {
    value: i64,
}

impl Number for IntegerValue {
    fn get_value(&self) -> i64 {
        self.value
    }
    fn set_value(&mut self, value: i64) {
        self.value = value;
    }
}

#[derive(Clone)]
struct DoubledValue {
    value: i64,
}

impl Number for DoubledValue {
    fn get_value(&self) -> i64 {
        self.value * 2
    }
    fn set_value(&mut self, value: i64) {
        self.value = value / 2;
    }
}

fn main() -> Result<(), AnyError> {
    let mut num1 = AnyValue::from_value(IntegerValue { value: 42 });
    let num2 = AnyValue::from_value(DoubledValue { value: 21 }); // Will appear as 42 when read

    // Read using with() and error handling
    match num1.with(|num: &IntegerValue| {
        println!("Value 1: {}", num.get_value());
    }) {
        Ok(_) => println!("Successfully read IntegerValue"),
        Err(e) => println!("Error reading IntegerValue: {}", e),
    }

    // Alternative pattern using ? operator for early return
    num2.with(|num: &DoubledValue| {
        println!("Value 2: {}", num.get_value());
    })?;

    // Update a number using with_mut()
    num1.with_mut(|num: &mut IntegerValue| {
        num.set_value(100);
        println!("New value 1: {}", num.get_value());
    })?;

    // Copies don't follow later changes
    let snapshot = num1.clone();
    num1.set(IntegerValue { value: 7 });
    let before = snapshot.with(|num: &IntegerValue| num.get_value())?;
    let after = num1.with(|num: &IntegerValue| num.get_value())?;
    println!("Snapshot still reads {}, current reads {}", before, after);

    // Reading as the wrong type is reported, not guessed
    match num2.with(|_: &IntegerValue| {}) {
        Ok(_) => println!("This shouldn't happen - num2 holds a DoubledValue"),
        Err(AnyError::TypeMismatch { expected, found }) => {
            println!("Correctly refused {} (holds {})", expected, found)
        }
        Err(e) => println!("Unexpected error: {}", e),
    }

    // Move the value out and check what's left behind
    let moved = num1.take();
    println!("Source is empty after take: {}", num1.is_empty());
    println!("Moved container holds: {:?}", moved);

    Ok(())
}
