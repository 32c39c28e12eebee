use sheepform::parse;

fn main() {
    let form_data = "Contact Us
<Name,text><Email,email>
<Favorite Color,dropdown>
\t<Red>
\t<Green>
\t<Blue>";

    match parse(form_data, "example.sheepform") {
        Ok(form) => {
            let json_output = form.to_json().unwrap();
            println!("Successfully parsed form to JSON:\n{json_output}");
        }
        Err(e) => {
            eprintln!("Failed to parse form: {e:?}");
        }
    }
}
