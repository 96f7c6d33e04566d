//! Walks through each container in turn, printing its state after every step.
//!
//! Run with `RUST_LOG=growvec=trace` to also see resize events.

use growvec::{search::binary_search, CircularQueue, GrowableBuffer, Result, Stack};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    dynamic_array()?;
    stack()?;
    queue()?;
    search();
    Ok(())
}

fn dynamic_array() -> Result<()> {
    info!("dynamic array");
    let mut arr = GrowableBuffer::with_capacity(2)?;
    println!("Initialized array with capacity = {}", arr.capacity());

    for i in 0..8 {
        arr.append(i * 10)?;
        println!("After inserting {}, size = {}, capacity = {}", i * 10, arr.len(), arr.capacity());
    }

    println!("\nCurrent elements:");
    for (i, elem) in arr.as_slice().iter().enumerate() {
        println!("  arr[{i}] = {elem}");
    }

    println!("\nSetting arr[3] = 1234");
    arr.set(3, 1234)?;
    println!("  arr[3] is now {}", arr.get(3)?);

    println!("\nRemoving element at index 5 (value = {})", arr.get(5)?);
    arr.remove_at(5)?;
    println!("After removal, size = {}, capacity = {}", arr.len(), arr.capacity());

    println!("\nElements after removal: {arr:?}");

    arr.release();
    println!("\nArray freed. size = {}, capacity = {}\n", arr.len(), arr.capacity());
    Ok(())
}

fn stack() -> Result<()> {
    info!("stack");
    let mut stk = Stack::with_capacity(4)?;

    print!("Pushing: ");
    for i in 1..=8 {
        print!("{i} ");
        stk.push(i)?;
    }
    println!();

    println!("Top element is: {}", stk.peek()?);

    print!("Popping: ");
    while !stk.is_empty() {
        print!("{} ", stk.pop()?);
    }
    println!("\n");
    Ok(())
}

fn queue() -> Result<()> {
    info!("queue");
    let mut q = CircularQueue::with_capacity(2)?;

    for i in 0..5 {
        println!("Enqueue {i}");
        q.enqueue(i)?;
    }

    println!("Queue size: {}", q.len());
    println!("Front element: {}", q.peek()?);

    while !q.is_empty() {
        println!("Dequeue {}", q.dequeue()?);
    }
    println!();
    Ok(())
}

fn search() {
    info!("binary search");
    let data = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
    match binary_search(&data, &4) {
        Some(i) => println!("Found 4 at index {i}"),
        None => println!("4 not found"),
    }
}
