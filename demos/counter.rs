//! Counter driven through the import table.
//!
//! A toy "engine" keeps the count, renders it with imports, and re-renders
//! whenever the click code comes back.
//!
//! Run with: cargo run --example counter

use std::cell::RefCell;
use std::rc::Rc;

use spark_dom::{EventCallback, EventKind, HeadlessDom, Registry, SharedMemory};
use spark_signals::effect;

const INCREMENT: u32 = 1;

type CounterRegistry = Registry<HeadlessDom, SharedMemory>;

fn call(registry: &mut CounterRegistry, name: &str, args: &[u32]) -> Option<u32> {
    registry.call(name, args).expect("valid import")
}

fn render(registry: &mut CounterRegistry, memory: &SharedMemory, count: u32) -> u32 {
    let text = format!("Count: {count}");
    memory.write(0, text.as_bytes()).expect("memory holds the label");

    let root = call(registry, "element_render_begin", &[]).unwrap_or(0);
    let column = call(registry, "element_create", &[1]).unwrap_or(0);
    call(registry, "element_addClass", &[column, 2]);
    call(registry, "element_appendChild", &[root, column]);

    let label = call(registry, "element_create", &[2]).unwrap_or(0);
    call(registry, "element_setTextS", &[label, 0, text.len() as u32]);
    call(registry, "element_appendChild", &[column, label]);

    let button = call(registry, "element_create", &[3]).unwrap_or(0);
    call(registry, "element_setClickEvent", &[button, INCREMENT]);
    call(registry, "element_appendChild", &[column, button]);
    button
}

fn main() {
    let mut dom = HeadlessDom::new();
    let mount = dom.create_mount();
    let memory = SharedMemory::with_len(64);
    let pending = Rc::new(RefCell::new(Vec::new()));
    let sink = pending.clone();
    let callback: EventCallback = Rc::new(move |code| sink.borrow_mut().push(code));
    let mut registry = Registry::new(dom, mount, memory.clone(), callback);

    let generation = registry.generation_signal();
    let _announce = effect(move || {
        let current = generation.get();
        if current > 0 {
            println!("render #{current}");
        }
    });

    let mut count = 0;
    let mut button = render(&mut registry, &memory, count);

    for _ in 0..3 {
        let node = *registry.node(button).expect("button is live");
        registry.dom().fire(node, EventKind::Click);

        let codes: Vec<u32> = pending.borrow_mut().drain(..).collect();
        for code in codes {
            if code == INCREMENT {
                count += 1;
            }
        }
        button = render(&mut registry, &memory, count);
        println!("{}", registry.dom().to_markup(mount));
    }
}
