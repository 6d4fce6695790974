use std::path::Path;

use console::Style;
use reframe_core::ImageResizerWidget;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_export_summary(
    widget: &ImageResizerWidget,
    input: &Path,
    output: &Path,
    preview: Option<&Path>,
) {
    let s = Styles::new();
    let outputs = widget.get_outputs();
    let view = widget.view();

    println!();
    println!("  {}", s.title.apply_to("Reframe Export"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    if let Some(preview) = preview {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Preview"),
            s.path.apply_to(preview.display())
        );
    }
    println!();

    // Target
    println!("  {}", s.header.apply_to("Target"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Preset"),
        s.method.apply_to(widget.preset())
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Size"),
        s.value.apply_to(format!("{}x{}", outputs.width, outputs.height))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Mapping"),
        s.method.apply_to(widget.config().export.scale_mode)
    );
    println!();

    // View
    println!("  {}", s.header.apply_to("View"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Scale"),
        s.value.apply_to(format!("{:.4}", view.scale))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Offset"),
        s.value
            .apply_to(format!("{:.1}, {:.1}", view.offset_x, view.offset_y))
    );
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Data URI"),
        s.value
            .apply_to(format!("{} bytes", outputs.data_uri.len()))
    );
    println!();
}
