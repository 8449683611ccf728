use otty_vtparse::{Action, Callback, Parser, ParserView};

#[derive(Default)]
struct Printer;

impl Callback for Printer {
    fn dispatch(&mut self, view: &ParserView<'_>, action: Action, code_point: u32) {
        match action {
            Action::Print => {
                for ch in view.print_buf() {
                    print!("{ch}");
                }
            }
            Action::Execute => println!("exec: {code_point:#04x}"),
            Action::Hook => println!(
                "DCS hook: params={:?} interms={:?} ignored={}",
                view.params(),
                view.intermediates(),
                view.ignore_flagged()
            ),
            Action::Put => println!("DCS put: {code_point:#04x}"),
            Action::Unhook => println!("DCS unhook"),
            Action::OscStart => println!("OSC start"),
            Action::OscPut => print!("{}", code_point as u8 as char),
            Action::OscEnd => println!(),
            Action::CsiDispatch => println!(
                "CSI: params={:?} interms={:?} ignored={} final={:#04x}",
                view.params(),
                view.intermediates(),
                view.ignore_flagged(),
                code_point
            ),
            Action::EscDispatch => println!(
                "ESC: interms={:?} final={:#04x}",
                view.intermediates(),
                code_point
            ),
            Action::Collect | Action::Param | Action::Clear | Action::Ignore | Action::Error => {}
        }
    }
}

fn main() {
    let mut parser = Parser::new(Printer);
    parser.feed_bytes(b"\x1b[31mhi\x1b[0m\n");
}
