//! ANSI preview of a layout tree, for debugging without a widget host.

use leavetime_render::{FontWeight, LayoutNode, Rendered, Rgb};
use owo_colors::{OwoColorize, Style};

pub fn render(rendered: &Rendered) {
    for node in &rendered.nodes {
        print_node(node);
    }
}

fn print_node(node: &LayoutNode) {
    match node {
        LayoutNode::Text {
            content,
            weight,
            color,
            ..
        } => println!("{}", styled(content, *weight, *color)),
        LayoutNode::Spacer { .. } => println!(),
        LayoutNode::Row { children } => {
            let parts: Vec<String> = children
                .iter()
                .map(|child| match child {
                    LayoutNode::Text {
                        content,
                        weight,
                        color,
                        ..
                    } => styled(content, *weight, *color),
                    _ => String::new(),
                })
                .collect();
            println!("{}", parts.join("  "));
        }
    }
}

fn styled(content: &str, weight: FontWeight, color: Rgb) -> String {
    let style = Style::new().truecolor(color.0, color.1, color.2);
    let style = match weight {
        FontWeight::Bold => style.bold(),
        FontWeight::Italic => style.italic(),
        FontWeight::Regular => style,
    };
    content.style(style).to_string()
}
