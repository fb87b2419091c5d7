//! Three instructions dispatched in order, with one data dependency
//!
//! Run with `BAGPIPE_LOG_LEVEL=debug` to see layout tracing.

use bagpipe::core::init_default_logging;
use bagpipe::prelude::*;

fn main() -> anyhow::Result<()> {
    init_default_logging().map_err(|err| anyhow::anyhow!("{}", err))?;

    let start = 0;
    let mut i0 = Operation::new("add x1, x2, x3");
    let mut i1 = Operation::new("orr x4, x5, x6");
    let mut i2 = Operation::new("b.eq");

    for (offset, op) in [&mut i0, &mut i1, &mut i2].into_iter().enumerate() {
        let cycle = start + offset as i64;
        op.at("D", cycle)?;
        op.at("E", cycle + 1)?;
        op.at("C", cycle + 2)?;
    }

    let dispatch = i0.require("D")? >> i1.require("D")? >> i2.require("D")?;
    let dependency = i0.require("E")? >> i1.require("E")?;

    let mut pipeline = Pipeline::new();
    pipeline += i0;
    pipeline += i1;
    pipeline += i2;
    pipeline += Edge::new(dispatch, "red")
        .with_legend("in-order-dispatch")
        .with_node_color("pink");
    pipeline += Edge::new(dependency, "blue")
        .with_legend("data-dependency")
        .with_node_color("lightblue");

    println!("=== Unicode ===");
    println!("{}", pipeline.render(&TextRenderer::new())?);

    println!("\n=== ASCII ===");
    println!(
        "{}",
        pipeline.render(&TextRenderer::with_style(CharacterSet::Ascii))?
    );

    println!("\n=== JSON ===");
    println!("{}", pipeline.render(&JsonRenderer::new())?);

    Ok(())
}
