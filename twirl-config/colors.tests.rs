use super::*;

#[test]
fn from_str_test() {
    assert_eq!(SpinColor(Color::Blue), "blue".parse().unwrap());
    assert_eq!(SpinColor(Color::DarkGreen), "dark_green".parse().unwrap());
    assert_eq!(SpinColor(Color::DarkGreen), " Dark_Green ".parse().unwrap());
    assert_eq!(SpinColor(Color::Rgb { r: 255, g: 0, b: 15 }), "#ff000f".parse().unwrap());
    assert_eq!(SpinColor(Color::AnsiValue(42)), "42".parse().unwrap());

    assert!("".parse::<SpinColor>().is_err());
    assert!("bluish".parse::<SpinColor>().is_err());
    assert!("#ff00".parse::<SpinColor>().is_err());
    assert!("#ff00zz".parse::<SpinColor>().is_err());
    assert!("256".parse::<SpinColor>().is_err());
}

#[test]
fn display_test() {
    assert_eq!("blue", SpinColor(Color::Blue).to_string());
    assert_eq!("#0a0b0c", SpinColor(Color::Rgb { r: 10, g: 11, b: 12 }).to_string());
    assert_eq!("7", SpinColor(Color::AnsiValue(7)).to_string());
}

#[test]
fn serde_test() {
    let color = serde_yaml::from_str::<SpinColor>("dark_cyan").unwrap();
    assert_eq!(SpinColor(Color::DarkCyan), color);

    let color = serde_yaml::from_str::<SpinColor>("'#102030'").unwrap();
    assert_eq!(SpinColor(Color::Rgb { r: 16, g: 32, b: 48 }), color);

    assert!(serde_yaml::from_str::<SpinColor>("no_such_color").is_err());

    assert_eq!("red\n", serde_yaml::to_string(&SpinColor(Color::Red)).unwrap());
}

#[test]
fn paint_test() {
    let painted = SpinColor(Color::Green).paint("- task").to_string();

    assert!(painted.contains("- task"));
    assert!(painted.starts_with('\x1b'));
}
