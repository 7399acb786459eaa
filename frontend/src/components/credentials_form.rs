use event_console_dto::session::Credentials;
use patternfly_yew::prelude::*;
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CredentialsFormProps {
    pub title: AttrValue,
    pub username_label: AttrValue,
    pub onsubmit: Callback<Credentials>,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub loading: bool,
}

/// Username/password form. The fields are cleared as soon as they are submitted.
#[function_component(CredentialsForm)]
pub fn credentials_form(props: &CredentialsFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let submit = {
        let username = username.clone();
        let password = password.clone();
        let onsubmit = props.onsubmit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            onsubmit.emit(Credentials::new((*username).clone(), (*password).clone()));
            username.set(String::new());
            password.set(String::new());
        })
    };

    html! {
        <PageSection>
            <Card>
                <CardTitle><h1>{ props.title.clone() }</h1></CardTitle>
                <CardBody>
                    if let Some(error) = &props.error {
                        <Alert inline=true title={error.clone()} r#type={AlertType::Danger} />
                    }
                    if props.loading {
                        <div>{"Logging in..."}</div>
                    } else {
                        <form onsubmit={submit}>
                            <TextInput
                                r#type={TextInputType::Text}
                                placeholder={props.username_label.to_string()}
                                value={(*username).clone()}
                                oninput={on_username}
                            />
                            <TextInput
                                r#type={TextInputType::Password}
                                placeholder="Password"
                                value={(*password).clone()}
                                oninput={on_password}
                            />
                            <Button label="Login" r#type={ButtonType::Submit} />
                        </form>
                    }
                </CardBody>
            </Card>
        </PageSection>
    }
}
