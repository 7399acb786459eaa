use patternfly_yew::prelude::*;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingStateProps {
    #[prop_or(AttrValue::from("Loading ..."))]
    pub label: AttrValue,
}

#[function_component(LoadingState)]
pub fn loading_state(props: &LoadingStateProps) -> Html {
    html! {
        <Card>
            <CardTitle><p><h1>{format!("⌛️ {}", props.label)}</h1></p></CardTitle>
            <CardBody>
                <div class="flex-center">
                    <Spinner size={SpinnerSize::Custom(String::from("80px"))} aria_label={props.label.to_string()} />
                </div>
            </CardBody>
        </Card>
    }
}
