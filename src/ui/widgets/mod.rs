pub mod button;
pub mod checkbox_list;
pub mod input_text;
pub mod virtual_keyboard;

pub use button::Button;
pub use checkbox_list::{CheckboxList, ListItem};
pub use input_text::InputText;
pub use virtual_keyboard::VirtualKeyboard;
